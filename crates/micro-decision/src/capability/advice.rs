use crate::decisions::DecisionClass;

/// Below this intensity a bad habit gets the severe warning.
const SEVERE_INTENSITY: i64 = -200;

/// Habit-centric advice for a role. The role name is interpolated verbatim.
///
/// Responses carry the capability tier advice instead; this message is kept as a standalone
/// helper for callers that want the habit framing.
pub fn generate_advice(class: DecisionClass, intensity: i64, role_name: &str) -> String {
    match class {
        DecisionClass::Good => format!(
            "Great choice! This habit is building the foundation for becoming a {role_name}."
        ),
        DecisionClass::Bad if intensity < SEVERE_INTENSITY => format!(
            "Warning: this habit is quietly wrecking your path to becoming a {role_name}. The damage is compounding fast."
        ),
        DecisionClass::Bad | DecisionClass::Unknown => format!(
            "This habit is slowing your journey to becoming a {role_name}. Fix it before it compounds."
        ),
    }
}
