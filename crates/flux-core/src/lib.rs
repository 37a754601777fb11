//! Flux Core: Stage Trait, Pipeline, e ProcessorChain
//!
//! Núcleo genérico por estágios tipados: a saída de cada estágio é a entrada
//! do próximo. A cadeia de tipos vive nos parâmetros do handle devolvido por
//! `add_stage`/`add_processor`; os estágios ficam armazenados sem tipo e
//! rodam um por vez.
//!
//! ```
//! use async_trait::async_trait;
//! use flux_core::{Pipeline, Stage, StageError, StageResult};
//!
//! struct DataItem {
//!     id: String,
//!     value: i64,
//! }
//!
//! struct RequireId;
//!
//! #[async_trait]
//! impl Stage<DataItem, DataItem> for RequireId {
//!     async fn execute(&self, item: DataItem) -> StageResult<DataItem> {
//!         if item.id.is_empty() {
//!             return Err(StageError::invalid_input("missing id"));
//!         }
//!         Ok(item)
//!     }
//! }
//!
//! struct DoubleValue;
//!
//! #[async_trait]
//! impl Stage<DataItem, i64> for DoubleValue {
//!     async fn execute(&self, item: DataItem) -> StageResult<i64> {
//!         Ok(item.value * 2)
//!     }
//! }
//!
//! let pipeline = Pipeline::<DataItem>::new()
//!     .add_stage(RequireId)
//!     .add_stage(DoubleValue);
//!
//! let item = DataItem { id: "123".to_string(), value: 42 };
//! let doubled: i64 = futures::executor::block_on(pipeline.execute(item)).unwrap();
//! assert_eq!(doubled, 84);
//! ```

pub mod chain;
mod context;
pub mod error;
pub mod flow;
pub mod options;
pub mod pipeline;
mod runner;
pub mod stage;

pub use chain::ProcessorChain;
pub use error::{FluxError, StageError, StageResult};
pub use flow::{Flow, FlowStream, Observer};
pub use options::PipelineOptions;
pub use pipeline::Pipeline;
pub use stage::Stage;

/// Flux engine version
pub const FLUX_VERSION: &str = env!("CARGO_PKG_VERSION");
