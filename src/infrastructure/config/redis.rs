/// Single-slot key holding the reference of the payment attempt that is
/// currently out at the gateway.
pub const PENDING_REFERENCE_KEY: &str = "checkout:pending_reference";
