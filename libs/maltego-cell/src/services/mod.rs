pub mod transforms;

pub use transforms::TransformService;
