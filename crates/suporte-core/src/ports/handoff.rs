/// Opens the external messaging application with a composed deep link.
///
/// Fire-and-forget: implementations report their own failures through logs,
/// nothing flows back into the submission state machine.
pub trait HandoffChannel: Send + Sync {
    fn open(&self, uri: &str);
}
