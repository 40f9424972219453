pub const GREETING: &str = "Hello, SAP Middleware!";

pub async fn hello() -> &'static str {
    GREETING
}
