//! Authorization context for engine operations.
//!
//! Privileged operations (catalog edits, disposition records) take an explicit
//! [`Session`] value instead of consulting any ambient admin flag. The UI
//! collaborator owns the login flow; the engine only cares whether the session
//! it is handed carries admin rights.

/// A caller's authorization context, passed into every privileged operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Session {
    admin: bool,
}

impl Session {
    /// A session with admin rights: may edit the catalog and record
    /// dispositions.
    pub fn admin() -> Self {
        Self { admin: true }
    }

    /// An ordinary storefront session: browsing, cart, and checkout only.
    pub fn storefront() -> Self {
        Self { admin: false }
    }

    pub fn is_admin(&self) -> bool {
        self.admin
    }
}
