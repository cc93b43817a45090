//! Teases for users who keep asking for another dish.

/// Messages keyed by the exact number of start requests in a session
const TEASES: &[(u32, &str)] = &[
    (2, "I knew you'd want another one"),
    (5, "Another one?! Keep going and I'll eat YOU!"),
];

/// Tease for the `count`-th start request since the last reset, if any
pub fn tease_for(count: u32) -> Option<&'static str> {
    TEASES
        .iter()
        .find(|(threshold, _)| *threshold == count)
        .map(|(_, message)| *message)
}
