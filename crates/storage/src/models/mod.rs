mod event;
mod fight;
mod fighter;
mod ranking;
mod weight_class;

pub use event::{Event, EventStatus};
pub use fight::{Fight, FightWithEvent};
pub use fighter::{Fighter, FighterStatus};
pub use ranking::{RankingEntry, RankingWithFighter};
pub use weight_class::WeightClass;
