pub mod date_math;
pub mod fight_record;
pub mod rank_ordering;
pub mod result_time;
pub mod roster;
