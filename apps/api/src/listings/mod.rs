// Fabricated listings with static deep links into real job directories.
// Nothing here calls out to the network.

pub mod catalog;
pub mod generator;
pub mod handlers;
pub mod links;
