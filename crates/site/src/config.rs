//! Fixed tuning constants for the site shell.

/// Minimum time the route-transition loader stays on screen, in milliseconds.
pub const MIN_DISPLAY_MS: u64 = 1200;

/// Content fade-in duration after the loader clears.
pub const REVEAL_FADE_MS: u64 = 400;

/// One-shot boot splash duration shown once at application start.
pub const BOOT_SPLASH_MS: u64 = 2000;

/// Delay between a qualifying route change and the welcome modal opening.
pub const WELCOME_DELAY_MS: u64 = 500;

/// How long a toast stays on screen before auto-expiring.
pub const TOAST_LIFETIME_MS: u64 = 4000;

/// Marquee speed for the community member strip, logical pixels per second.
pub const MEMBER_MARQUEE_SPEED: f32 = 30.0;

/// Marquee speed for the leader strip. Larger cards scroll faster.
pub const LEADER_MARQUEE_SPEED: f32 = 60.0;

/// Length of the eased card-centering animation on hover.
pub const CENTERING_MS: u64 = 500;

/// Third-party form relay the contact form posts to.
pub const RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

/// Static access key identifying this site to the relay.
pub const RELAY_ACCESS_KEY: &str = "6f1c9e2a-devmeet-demo-key";

/// Subject line attached to every relayed submission.
pub const RELAY_SUBJECT: &str = "New DevMeet signup";

/// Sender name attached to every relayed submission.
pub const RELAY_FROM_NAME: &str = "DevMeet Website";
