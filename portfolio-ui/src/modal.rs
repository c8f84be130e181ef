use tracing::debug;

/// Embedded player whose source can be swapped, e.g. a YouTube iframe.
pub trait MediaFrame {
    fn src(&self) -> &str;
    fn set_src(&mut self, src: &str);
}

/// Frame that only remembers its current source.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbeddedFrame {
    src: String,
}

impl EmbeddedFrame {
    pub fn new(src: impl Into<String>) -> Self {
        Self { src: src.into() }
    }
}

impl MediaFrame for EmbeddedFrame {
    fn src(&self) -> &str {
        &self.src
    }

    fn set_src(&mut self, src: &str) {
        self.src = src.to_string();
    }
}

/// Where a click landed, relative to the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The "watch demo" control
    OpenControl,
    /// The close (×) control inside the modal
    CloseControl,
    /// The overlay itself, outside the modal content
    Backdrop,
    /// Anywhere inside the modal content
    Content,
    /// Anywhere else on the page
    Elsewhere,
}

/// Demo video overlay.
///
/// Closing always clears the frame's source and then restores the one it had
/// when the modal was built, so playback stops instead of continuing hidden.
#[derive(Debug)]
pub struct VideoModal<F: MediaFrame> {
    frame: F,
    original_src: String,
    visible: bool,
}

impl<F: MediaFrame> VideoModal<F> {
    pub fn new(frame: F) -> Self {
        let original_src = frame.src().to_string();
        Self {
            frame,
            original_src,
            visible: false,
        }
    }

    pub fn open(&mut self) {
        debug!("Opening video modal");
        self.visible = true;
    }

    pub fn close(&mut self) {
        debug!("Closing video modal");
        self.visible = false;
        self.frame.set_src("");
        self.frame.set_src(&self.original_src);
    }

    /// Route a click. Returns whether the visibility changed.
    pub fn handle_click(&mut self, target: ClickTarget) -> bool {
        let was_visible = self.visible;
        match target {
            ClickTarget::OpenControl => self.open(),
            ClickTarget::CloseControl => self.close(),
            ClickTarget::Backdrop if self.visible => self.close(),
            ClickTarget::Backdrop | ClickTarget::Content | ClickTarget::Elsewhere => {}
        }
        was_visible != self.visible
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn frame(&self) -> &F {
        &self.frame
    }

    pub fn original_src(&self) -> &str {
        &self.original_src
    }
}
