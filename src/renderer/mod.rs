//! Presentation boundary
//!
//! Turns read-only level state into draw commands and triangle lists. No GPU
//! or window code lives here; a backend uploads the vertices and resolves the
//! sprite keys to whatever images it loaded.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::{ActorStyle, AssetManifest, DrawCommand, SceneBuilder, SpriteKey};
pub use shapes::tessellate;
pub use vertex::Vertex;
