use axum::http::{HeaderMap, HeaderValue, StatusCode, header};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower_cookies::{Cookie, Cookies};

#[derive(Deserialize)]
struct ValuedMessage<T> {
    #[serde(rename = "_")]
    value: T,
}

#[derive(Serialize)]
struct ValuedMessageRef<'a, T> {
    #[serde(rename = "_")]
    value: &'a T,
}

const FLASH_COOKIE_NAME: &str = "_flash";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct FlashData {
    pub kind: String,
    pub message: String,
}

impl FlashData {
    pub fn success(message: &str) -> Self {
        Self {
            kind: "success".to_owned(),
            message: message.to_owned(),
        }
    }
}

/// Reads the pending flash message and clears it so it is shown once.
pub fn take_flash_cookie<T>(cookies: &Cookies) -> Option<T>
where
    T: DeserializeOwned,
{
    let flash_cookie = cookies.get(FLASH_COOKIE_NAME)?;

    let mut removal = Cookie::from(FLASH_COOKIE_NAME);
    removal.set_path("/");
    cookies.remove(removal);

    serde_json::from_str::<ValuedMessage<T>>(flash_cookie.value())
        .ok()
        .map(|message| message.value)
}

pub type PostResponse = (StatusCode, HeaderMap);

/// Stores `data` as the flash message and redirects to `location`.
pub fn post_response<T>(cookies: &Cookies, data: T, location: &'static str) -> PostResponse
where
    T: Serialize,
{
    let valued_message_ref = ValuedMessageRef { value: &data };

    match serde_json::to_string(&valued_message_ref) {
        Ok(value) => {
            let mut cookie = Cookie::new(FLASH_COOKIE_NAME, value);
            cookie.set_path("/");
            cookies.add(cookie);
        }
        Err(err) => tracing::warn!(error = %err, "could not encode flash message"),
    }

    let mut header = HeaderMap::new();
    header.insert(header::LOCATION, HeaderValue::from_static(location));

    (StatusCode::FOUND, header)
}

