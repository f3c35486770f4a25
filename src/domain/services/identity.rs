#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;

use uuid::Uuid;

pub struct Identity {}

impl Identity {
    /// Generates the opaque conversation id attached to every request in a
    /// session. The id only scopes conversational context on the backend, so
    /// a collision would be cosmetic rather than a correctness hazard.
    pub fn generate() -> String {
        let suffix = Uuid::new_v4()
            .to_string()
            .split('-')
            .take(2)
            .collect::<Vec<&str>>()
            .join("");

        return format!("conv_{suffix}");
    }
}
