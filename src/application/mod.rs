mod life_session;
mod hanoi_session;

pub use life_session::LifeSession;
pub use hanoi_session::HanoiSession;
