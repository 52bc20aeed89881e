//! Authentication Handlers Module
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs      - Module exports and documentation
//! ├── types.rs    - Request and response types
//! ├── signup.rs   - User registration handler
//! ├── login.rs    - User authentication handler
//! ├── logout.rs   - Session cookie removal
//! └── me.rs       - Get current user handler
//! ```
//!
//! # Handlers
//!
//! - **`signup`** - POST /api/auth/signup - User registration
//! - **`login`** - POST /api/auth/login - User authentication
//! - **`logout`** - POST /api/auth/logout - Clear the session cookie
//! - **`get_me`** - GET /api/auth/me - Current user's profile and streak

pub mod types;

pub mod signup;

pub mod login;

pub mod logout;

pub mod me;

// Re-export commonly used types
pub use types::{AuthResponse, LoginRequest, SignupRequest};

// Re-export handlers
pub use login::login;
pub use logout::logout;
pub use me::get_me;
pub use signup::signup;
