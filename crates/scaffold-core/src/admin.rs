use std::fmt;

/// Identifies an admin within the admin pool.
///
/// Admins themselves live outside this crate; field descriptions refer to
/// their owning admin and any delegated association admin by key. Keeping the
/// reference one-directional avoids the field ↔ admin ↔ association-admin
/// ownership cycle.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdminId(pub usize);

impl From<&Self> for AdminId {
    fn from(src: &Self) -> Self {
        *src
    }
}

impl fmt::Debug for AdminId {
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(fmt, "AdminId({})", self.0)
    }
}
