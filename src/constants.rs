// DOM wiring for the background layer.

// Canvas the scene is mounted on
pub const CANVAS_ID: &str = "trading-bg-canvas";

// Host overlay whose visibility gates the animation: the scene runs while the
// auth screen is showing and sleeps once it gets the `hidden` class.
pub const AUTH_SCREEN_ID: &str = "auth-screen";
pub const HIDDEN_CLASS: &str = "hidden";
