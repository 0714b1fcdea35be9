/// Marker for connection identities.
/// A participant is one open client connection; its `ID<Participant>` is
/// minted by the dispatcher when the socket opens and dies with it.
#[derive(Debug, Clone, Copy)]
pub struct Participant;
