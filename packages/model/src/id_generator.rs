use uuid::Uuid;

pub const SWAP_PIN_ID_PREFIX: &str = "swp-";

const SUFFIX_LEN: usize = 6;

/// Generate a swap pin id (`swp-` + 6 hex chars) not accepted by `taken`
///
/// Ids are random, not sequential: an id freed by a deleted pin must never
/// come back in a later session.
pub fn new_swap_pin_id(taken: impl Fn(&str) -> bool) -> String {
    loop {
        let raw = Uuid::new_v4().simple().to_string();
        let id = format!("{}{}", SWAP_PIN_ID_PREFIX, &raw[..SUFFIX_LEN]);
        if !taken(&id) {
            return id;
        }
    }
}

/// Check whether a string has the shape of a generated swap pin id
pub fn is_swap_pin_id(id: &str) -> bool {
    id.strip_prefix(SWAP_PIN_ID_PREFIX)
        .map(|rest| rest.len() == SUFFIX_LEN && rest.chars().all(|c| c.is_ascii_hexdigit()))
        .unwrap_or(false)
}
