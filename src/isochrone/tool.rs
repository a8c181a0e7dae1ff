use crate::{
    core::{
        config::IsochroneConfig,
        map::{ListenerId, Map},
    },
    input::events::{EventHandled, MapEvent},
    isochrone::{
        picker::PointPicker,
        pipeline::IsochronePipeline,
        request::build_requests,
        transport::{HttpTransport, IsochroneTransport},
    },
    ui::{
        controls::Control,
        form::{IsochroneForm, ToolToggle},
    },
    Result,
};

/// Id of the on-map button that opens the isochrone panel
pub const TOOL_BUTTON_ID: &str = "isoButton";

/// Wires the isochrone controls to the map: start point button, panel
/// toggle and run button.
pub struct IsochroneTool<T: IsochroneTransport> {
    config: IsochroneConfig,
    picker: PointPicker,
    toggle: ToolToggle,
    pipeline: IsochronePipeline<T>,
}

impl IsochroneTool<HttpTransport> {
    /// Tool talking to the configured routing API over HTTP
    pub fn http(config: IsochroneConfig) -> Result<Self> {
        let transport = HttpTransport::new(&config)?;
        Self::new(config, transport)
    }
}

impl<T: IsochroneTransport> IsochroneTool<T> {
    pub fn new(config: IsochroneConfig, transport: T) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pipeline: IsochronePipeline::new(transport, &config),
            config,
            picker: PointPicker::new(),
            toggle: ToolToggle::new(),
        })
    }

    pub fn config(&self) -> &IsochroneConfig {
        &self.config
    }

    pub fn picker(&self) -> &PointPicker {
        &self.picker
    }

    pub fn pipeline(&self) -> &IsochronePipeline<T> {
        &self.pipeline
    }

    /// Places the tool's button control on the map
    pub fn install(&self, map: &mut Map) {
        map.add_control(Control::button(
            TOOL_BUTTON_ID,
            "myButton",
            "Isochrone tool",
            Some("./assets/duration.svg"),
        ));
    }

    /// "Starting point" button: arm the picker for the next map click
    pub fn pick_start_point(&mut self, map: &mut Map) -> Result<ListenerId> {
        self.picker.arm(map).map_err(|e| {
            log::warn!("{}", e);
            e
        })
    }

    /// Routes a map event to the armed picker
    pub fn handle_event(
        &mut self,
        map: &mut Map,
        form: &mut IsochroneForm,
        event: &MapEvent,
    ) -> Result<EventHandled> {
        let delivered = map.dispatch(event);
        let MapEvent::SingleClick { coordinate } = event else {
            return Ok(EventHandled::NotHandled);
        };
        match self.picker.listener() {
            Some(listener) if delivered.contains(&listener) => {
                self.picker.complete(map, form, *coordinate)?;
                Ok(EventHandled::Handled)
            }
            _ => Ok(EventHandled::NotHandled),
        }
    }

    /// Tool button: show or hide the input panel
    pub fn toggle_panel(&mut self, form: &mut IsochroneForm) -> bool {
        self.toggle.toggle(&mut form.panel)
    }

    pub fn is_panel_open(&self) -> bool {
        self.toggle.is_open()
    }

    /// "Run" button: validate the form and paint one overlay per duration.
    ///
    /// Validation errors are returned before any request is made; their
    /// message is meant for the user.
    pub async fn run(&mut self, map: &mut Map, form: &IsochroneForm) -> Result<usize> {
        let requests = match build_requests(
            &form.time_input,
            &form.coord_x,
            &form.coord_y,
            form.transport_mode,
            &self.config,
        ) {
            Ok(requests) => requests,
            Err(e) => {
                log::warn!("isochrone run rejected: {}", e);
                return Err(e);
            }
        };

        match self.pipeline.run(map, &requests, form.transport_mode).await {
            Ok(painted) => Ok(painted),
            Err(e) => {
                log::error!("isochrone run failed: {}", e);
                Err(e)
            }
        }
    }
}

impl<T: IsochroneTransport> std::fmt::Debug for IsochroneTool<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IsochroneTool")
            .field("picker", &self.picker)
            .field("panel_open", &self.toggle.is_open())
            .finish_non_exhaustive()
    }
}

