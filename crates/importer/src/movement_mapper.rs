use storage::models::Discipline;

pub trait MovementMapper {
    fn map_movement(&self, source_name: &str) -> Option<Discipline>;
}

/// Maps the lift names found in meet documents onto the three disciplines,
/// including the older `dead` spelling.
pub struct DisciplineMapper;

impl MovementMapper for DisciplineMapper {
    fn map_movement(&self, name: &str) -> Option<Discipline> {
        match name.trim().to_lowercase().as_str() {
            "squat" | "sq" => Some(Discipline::Squat),
            "bench" | "bench press" | "bp" => Some(Discipline::Bench),
            "deadlift" | "dead" | "dl" => Some(Discipline::Deadlift),
            _ => None,
        }
    }
}
