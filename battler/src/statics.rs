lazy_static::lazy_static! {
    pub static ref HAND_SIZE: usize = 4;
    pub static ref DEFAULT_MAX_HEALTH: i64 = 200;
    pub static ref INITIAL_DAMAGE_MULTIPLIER: f32 = 1.0;
    pub static ref INITIAL_BLOCK_MULTIPLIER: f32 = 1.0;
    pub static ref INITIAL_HEAL_MULTIPLIER: f32 = 1.0;
    // A scale of 1.0 means the next enemy attack lands unreduced.
    pub static ref NEUTRAL_BLOCK_REDUCTION: f32 = 1.0;
}
