pub mod legend;
pub mod session;
pub mod synthetic;
pub mod widget;

pub use legend::LegendScrapeSource;
pub use session::WidgetSession;
pub use synthetic::SyntheticSource;
pub use widget::WidgetExportSource;
