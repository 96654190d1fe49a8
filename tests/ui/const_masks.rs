use enum_flagset::{FlagSet, flag_enum, flag_mask};

flag_enum! {
    pub enum Mode: u8 {
        Read = 0,
        Write = 1,
        Sync = 6,
    }
}

const READ_WRITE: u8 = flag_mask!(u8; Mode::Read, Mode::Write);
const SYNC: i8 = flag_mask!(i8; Mode::Sync);
const EMPTY: FlagSet<Mode, u8> = FlagSet::new();

fn main() {
    assert_eq!(READ_WRITE, 0b11);
    assert_eq!(SYNC, 0b0100_0000);
    assert!(EMPTY.is_empty());
    assert_eq!(FlagSet::<Mode, u8>::from_bits(READ_WRITE).len(), 2);
}
