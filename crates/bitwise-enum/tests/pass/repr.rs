// SPDX-License-Identifier: MPL-2.0

use core::mem::size_of;

#[bitwise_enum::bitmask]
enum Narrow {
    A = 1,
    B = 0x80,
}

#[bitwise_enum::bitmask]
enum Wider {
    A = 1,
    B = 0x100,
}

#[bitwise_enum::bitmask]
enum Widest {
    A = 0x1_0000_0000_0000_0000,
}

#[bitwise_enum::bitmask]
#[repr(u32)]
enum Explicit {
    A = 1,
}

#[bitwise_enum::bitmask(width = 64)]
enum ByWidth {
    A = 1 << 40,
}

#[bitwise_enum::bitmask(size = 8)]
#[repr(u64)]
enum Agreeing {
    A = 1,
}

const BASE: u16 = 1 << 9;

#[bitwise_enum::bitmask]
#[repr(u16)]
enum Computed {
    A = BASE,
    B = BASE << 1,
}

fn main() {
    assert_eq!(size_of::<Narrow>(), 1);
    assert_eq!(size_of::<Wider>(), 2);
    assert_eq!(size_of::<Widest>(), 16);
    assert_eq!(size_of::<Explicit>(), 4);
    assert_eq!(size_of::<ByWidth>(), 8);
    assert_eq!(size_of::<Agreeing>(), 8);
    assert_eq!(size_of::<Computed>(), 2);

    let _: u8 = Narrow::B.bits();
    let _: u128 = Widest::A.bits();
    assert_eq!(ByWidth::A.bits(), 1 << 40);
    assert_eq!((Computed::A | Computed::B).bits(), 0b11 << 9);
}
