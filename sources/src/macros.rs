//! Define our own macro to simplify the code
//!

/// Simple macro to generate PathBuf from a series of entries
///
#[macro_export]
macro_rules! makepath {
    ($($item:expr),+) => {
        [
        $(PathBuf::from($item),)+
        ]
        .iter()
        .collect()
    };
}

/// Call the HTTP client with the proper arguments
///
/// - plain GET, basic auth applied when credentials are configured
///
#[macro_export]
macro_rules! http_get_basic {
    ($self:ident, $url:ident) => {{
        let req = $self.client.get(&$url).header(
            "user-agent",
            format!("{}/{}", crate_name!(), crate_version!()),
        );
        let req = match &$self.auth {
            Auth::Login { username, password } => req.basic_auth(username, Some(password)),
            Auth::Anon => req,
        };
        req.send()
    }};
}
