pub mod fmt {
    pub fn show(input: &str, key: &str) -> String {
        format!("sideload show {} --id '{}'", input, key)
    }

    pub fn resolve(input: &str, key: &str, relationship: &str) -> String {
        format!(
            "sideload resolve {} --id '{}' --relationship {}",
            input, key, relationship
        )
    }

    pub fn list_all(input: &str) -> String {
        format!("sideload list {}", input)
    }
}
