/// What the runner does with the terminal at the end of a loop iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FramePlan {
    pub resize: Option<(u16, u16)>,
    pub render: bool,
}

/// Collects render triggers over one loop iteration so the frame is drawn at most once
#[derive(Debug, Default)]
pub struct Coalescer {
    render_requests: usize,
    frame_due: bool,
    resize: Option<(u16, u16)>,
}

impl Coalescer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A `Cmd::RequestRender` arrived from the update loop
    pub fn request_render(&mut self) {
        self.render_requests += 1;
    }

    /// The terminal's frame-rate tick fired
    pub fn frame_due(&mut self) {
        self.frame_due = true;
    }

    /// Only the last resize of an iteration is applied
    pub fn resize(&mut self, width: u16, height: u16) {
        self.resize = Some((width, height));
    }

    /// Consume the iteration's triggers
    pub fn take(&mut self) -> FramePlan {
        let plan = FramePlan {
            resize: self.resize,
            render: self.render_requests > 0 || self.frame_due || self.resize.is_some(),
        };
        *self = Self::default();
        plan
    }
}
