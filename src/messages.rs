//! Motivational popup lines.

use rand::Rng;

/// Lines flashed after a regular log. Completion popups show the elapsed
/// time instead.
const MESSAGES: [&str; 8] = [
    "YOU ARE A BEAST!",
    "UNSTOPPABLE!",
    "DOMINATING THE FEED!",
    "KEEP CRUSHING IT!",
    "LEGENDARY STATUS!",
    "DOPAMINE OVERLOAD!",
    "PURE POWER!",
    "LINKEDIN GOD MODE!",
];

/// Picks a message from the fixed palette. The random source is injected so
/// tests can pin the choice.
pub fn motivational_message(rng: &mut impl Rng) -> &'static str {
    MESSAGES[rng.gen_range(0..MESSAGES.len())]
}
