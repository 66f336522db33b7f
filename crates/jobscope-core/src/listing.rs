/// A listing ready to be appended to the `jobs` table.
///
/// `tags` is already joined with `", "`; the analyzer splits it back apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewListing {
    pub source: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub tags: String,
    pub date_posted: String,
}
