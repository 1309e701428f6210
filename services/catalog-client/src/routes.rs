/// Screens reachable in the catalog front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    GameList,
    /// `/edit`
    NewGame,
    /// `/edit/:id`, keyed by game name.
    EditGame(String),
}

impl Route {
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Route::GameList),
            ["edit"] => Some(Route::NewGame),
            ["edit", id] => Some(Route::EditGame(percent_decode(id))),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::GameList => "/".to_string(),
            Route::NewGame => "/edit".to_string(),
            Route::EditGame(id) => format!("/edit/{}", percent_encode(id)),
        }
    }

    /// Game name carried by an edit route.
    pub fn edit_id(&self) -> Option<&str> {
        match self {
            Route::EditGame(id) => Some(id),
            _ => None,
        }
    }
}

fn percent_encode(segment: &str) -> String {
    let mut out = String::with_capacity(segment.len());
    for byte in segment.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

fn percent_decode(segment: &str) -> String {
    let bytes = segment.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        let escaped = (bytes[i] == b'%')
            .then(|| segment.get(i + 1..i + 3))
            .flatten()
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());
        match escaped {
            Some(byte) => {
                out.push(byte);
                i += 3;
            }
            None => {
                out.push(bytes[i]);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}
