/// Presentation of the prediction on the form page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum UiVariant {
    /// The raw model output in a read-only box.
    Plain,
    /// The raw output plus the dollar price on a gauge dial.
    #[default]
    Gauge,
}

impl std::fmt::Display for UiVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Gauge => write!(f, "gauge"),
        }
    }
}
