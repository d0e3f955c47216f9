// SPDX-License-Identifier: MPL-2.0

use bitwise_enum::Bitmask;

#[bitwise_enum::bitmask]
enum Counted {
    Zero,
    One,
    Four = 4,
    Five,
}

const SHIFT: u8 = 3;

#[bitwise_enum::bitmask]
#[repr(u8)]
enum AfterExpression {
    Shifted = 1 << SHIFT,
    Next,
}

#[bitwise_enum::bitmask]
enum Empty {}

fn main() {
    assert_eq!(Counted::Zero.bits(), 0);
    assert_eq!(Counted::One.bits(), 1);
    assert_eq!(Counted::Four.bits(), 4);
    assert_eq!(Counted::Five.bits(), 5);
    assert_eq!(Counted::ALL.bits(), 5);

    assert_eq!(AfterExpression::Shifted.bits(), 8);
    assert_eq!(AfterExpression::Next.bits(), 9);

    assert_eq!(Empty::ALL.bits(), 0);
    assert!(!Empty::ALL == Empty::from_bits(0xff));
}
