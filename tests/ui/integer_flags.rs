use enum_flagset::FlagSet;
use enum_flagset::raw::{is_flag_set, set_flags};

fn main() {
    let mut set = FlagSet::<u16, u16>::from_flags(&[0, 15]);
    set += 3;
    assert_eq!(set.bits(), 0b1000_0000_0000_1001);
    assert!(enum_flagset::try_bit_mask_for::<u16, u16>(16).is_err());

    let mut register = 0i32;
    set_flags(&mut register, &[30u8]);
    assert!(is_flag_set(register, 30u8));
}
