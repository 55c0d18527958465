pub mod battle;
pub mod specs;

pub use battle::*;
pub use specs::*;

#[ctor::ctor]
fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
