pub mod collector;
pub mod config;
pub mod error;
pub mod language;
pub mod model;
pub mod render;
pub mod session;

pub use config::{Capabilities, LensConfig};
pub use error::{LensError, Result};
pub use model::{AnalysisRequest, AnalysisResponse, SentenceResult, WordAnalysis};
pub use render::ResultsView;
pub use session::{Applied, Page, Session, Ticket, Trigger};
