/// Generates a short identifier used to correlate the log lines of one call.
///
/// The identifier is 12 characters long, made of uppercase English letters
/// (`A-Z`) and digits (`0-9`), drawn with the `nanoid` generator.
///
/// # Examples
/// ```
/// use eduzz_client::utils::id::get_id;
/// let id = get_id();
/// assert_eq!(id.len(), 12);
/// ```
#[must_use]
pub fn get_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(12, &alphabet)
}
