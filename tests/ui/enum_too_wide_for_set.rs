use enum_flagset::{FlagSet, flag_enum};

flag_enum! {
    pub enum Wide: u8 {
        Low = 0,
        High = 31,
    }
}

fn main() {
    let _set = FlagSet::<Wide, u16>::new();
}
