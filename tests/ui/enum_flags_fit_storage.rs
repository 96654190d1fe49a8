use enum_flagset::{FlagSet, flag_enum};

flag_enum! {
    #[derive(Debug)]
    pub enum Widths: u8 {
        Seven = 7,
        Fifteen = 15,
        ThirtyOne = 31,
    }
}

flag_enum! {
    #[derive(Debug)]
    pub enum Tiny: i8 {
        Zero,
        Six = 6,
    }
}

fn main() {
    let wide = FlagSet::<Widths, u32>::from_flags(&[Widths::Seven, Widths::ThirtyOne]);
    assert_eq!(wide.bits(), 1 << 31 | 1 << 7);

    let default_width: FlagSet<Widths> = FlagSet::from_flags(&[Widths::Fifteen]);
    assert_eq!(default_width.bits(), 1 << 15);

    let tiny = FlagSet::<Tiny, u8>::all_through(Tiny::Six);
    assert_eq!(tiny.bits(), 0b0111_1111);
    let signed: i8 = enum_flagset::bit_mask_for(Tiny::Six);
    assert_eq!(signed, 0b0100_0000);
}
