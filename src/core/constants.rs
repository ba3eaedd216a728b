// Tick and timing
pub const TICKS_PER_SECOND: u32 = 30;

// World geometry (pixels, y grows downward)
pub const WORLD_WIDTH: u32 = 500;
pub const WORLD_HEIGHT: u32 = 800;
pub const BIRD_SPAWN_X: f64 = 230.0;
pub const BIRD_SPAWN_Y: f64 = 250.0;
pub const GROUND_Y: f64 = 730.0;
pub const SCROLL_VELOCITY: f64 = 5.0; // shared by pipes and ground

// Bird kinematics, calibrated to TICKS_PER_SECOND
pub const JUMP_VELOCITY: f64 = -10.5;
pub const ACCELERATION: f64 = 1.5; // coefficient of t² in the displacement formula
pub const TERMINAL_DISPLACEMENT: f64 = 16.0;
pub const ASCENT_BOOST: f64 = 2.0;
pub const MAX_TILT: f64 = 25.0;
pub const MIN_TILT: f64 = -90.0;
pub const ROTATION_VELOCITY: f64 = 20.0;
pub const TILT_HOLD_MARGIN: f64 = 50.0;
pub const ANIMATION_TICKS: u32 = 5;
pub const NOSEDIVE_TILT: f64 = -80.0;

// Obstacles
pub const PIPE_GAP: f64 = 200.0;
pub const PIPE_MIN_HEIGHT: u32 = 50;
pub const PIPE_MAX_HEIGHT: u32 = 450; // exclusive
pub const PIPE_SPAWN_X: f64 = 700.0;

// Sprite dimensions
pub const BIRD_SPRITE_WIDTH: u32 = 68;
pub const BIRD_SPRITE_HEIGHT: u32 = 48;
pub const BIRD_FRAME_COUNT: usize = 3;
pub const PIPE_SPRITE_WIDTH: u32 = 104;
pub const PIPE_SPRITE_HEIGHT: u32 = 640;
pub const PIPE_LIP_HEIGHT: u32 = 48;
pub const PIPE_LIP_INSET: u32 = 6;
pub const GROUND_TILE_WIDTH: u32 = 672;
pub const GROUND_TILE_HEIGHT: u32 = 224;
