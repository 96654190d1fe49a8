use enum_flagset::{bit_mask_for, flag_enum};

flag_enum! {
    pub enum Wide: u8 {
        Low = 0,
        High = 31,
    }
}

fn main() {
    let _mask: u16 = bit_mask_for(Wide::Low);
}
