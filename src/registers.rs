//! # Register File
//!
//! The 6502 programmer-visible state:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: N, V, B, D, I, Z, C (individual bool fields)
//!
//! Negative/Zero evaluation is generic over the result width through the
//! `FlagWidth` trait, so a 16-bit result tests bit 15 rather than bit 7.

use std::fmt;

/// Integer widths the Negative/Zero helpers can evaluate.
pub trait FlagWidth: Copy {
    /// Number of bits in the value.
    const BITS: u32;

    /// True if the top bit at this width is set.
    fn is_negative(self) -> bool;

    /// True if every bit is clear.
    fn is_zero(self) -> bool;
}

macro_rules! impl_flag_width {
    ($($ty:ty),*) => {
        $(
            impl FlagWidth for $ty {
                const BITS: u32 = <$ty>::BITS;

                fn is_negative(self) -> bool {
                    (self >> (Self::BITS - 1)) & 1 == 1
                }

                fn is_zero(self) -> bool {
                    self == 0
                }
            }
        )*
    };
}

impl_flag_width!(u8, u16);

/// The 8-bit registers an instruction can name as a source or destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Register {
    /// Accumulator
    A,
    /// X index register
    X,
    /// Y index register
    Y,
    /// Stack pointer
    SP,
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Register::A => "A",
            Register::X => "X",
            Register::Y => "Y",
            Register::SP => "SP",
        };
        f.write_str(name)
    }
}

/// 6502 register file.
///
/// `Default` gives an all-zero file; `power_on` gives the documented reset
/// state.
///
/// # Examples
///
/// ```
/// use mos6502_core::Registers;
///
/// let mut regs = Registers::default();
/// let value = regs.set_a(0x80);
/// regs.check_negative(value);
/// regs.check_zero(value);
///
/// assert!(regs.flag_n());
/// assert!(!regs.flag_z());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Registers {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Carry flag (set on unsigned overflow/underflow)
    pub(crate) flag_c: bool,

    /// Zero flag (set if result is zero)
    pub(crate) flag_z: bool,

    /// Interrupt disable flag (blocks IRQ when set)
    pub(crate) flag_i: bool,

    /// Decimal mode flag (enables BCD arithmetic)
    pub(crate) flag_d: bool,

    /// Break flag (set when BRK instruction executed)
    pub(crate) flag_b: bool,

    /// Overflow flag (set on signed overflow)
    pub(crate) flag_v: bool,

    /// Negative flag (set if the top bit of the result is 1)
    pub(crate) flag_n: bool,
}

impl Registers {
    /// Returns the 6502 power-on state: SP = 0xFD, interrupt disable set,
    /// everything else zero.
    pub fn power_on() -> Self {
        Self {
            sp: 0xFD,
            flag_i: true,
            ..Self::default()
        }
    }

    // ========== Register Accessors ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the stack pointer value.
    ///
    /// Note: The full stack address is 0x0100 + SP.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Sets the accumulator and returns the stored value.
    pub fn set_a(&mut self, value: u8) -> u8 {
        self.a = value;
        value
    }

    /// Sets the X index register and returns the stored value.
    pub fn set_x(&mut self, value: u8) -> u8 {
        self.x = value;
        value
    }

    /// Sets the Y index register and returns the stored value.
    pub fn set_y(&mut self, value: u8) -> u8 {
        self.y = value;
        value
    }

    /// Sets the stack pointer and returns the stored value.
    pub fn set_sp(&mut self, value: u8) -> u8 {
        self.sp = value;
        value
    }

    /// Sets the program counter and returns the stored value.
    pub fn set_pc(&mut self, value: u16) -> u16 {
        self.pc = value;
        value
    }

    /// Reads an 8-bit register by name.
    pub fn get(&self, register: Register) -> u8 {
        match register {
            Register::A => self.a,
            Register::X => self.x,
            Register::Y => self.y,
            Register::SP => self.sp,
        }
    }

    /// Writes an 8-bit register by name and returns the stored value.
    pub fn set(&mut self, register: Register, value: u8) -> u8 {
        match register {
            Register::A => self.set_a(value),
            Register::X => self.set_x(value),
            Register::Y => self.set_y(value),
            Register::SP => self.set_sp(value),
        }
    }

    // ========== Flag Evaluation ==========

    /// Sets N from the top bit of `result` at the result's own width.
    pub fn check_negative<T: FlagWidth>(&mut self, result: T) {
        self.flag_n = result.is_negative();
    }

    /// Sets Z if `result` is zero, clears it otherwise.
    pub fn check_zero<T: FlagWidth>(&mut self, result: T) {
        self.flag_z = result.is_zero();
    }

    // ========== Status Flags ==========

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    /// Sets the carry flag and returns the stored value.
    pub fn set_flag_c(&mut self, value: bool) -> bool {
        self.flag_c = value;
        value
    }

    /// Sets the zero flag and returns the stored value.
    pub fn set_flag_z(&mut self, value: bool) -> bool {
        self.flag_z = value;
        value
    }

    /// Sets the interrupt disable flag and returns the stored value.
    pub fn set_flag_i(&mut self, value: bool) -> bool {
        self.flag_i = value;
        value
    }

    /// Sets the decimal mode flag and returns the stored value.
    pub fn set_flag_d(&mut self, value: bool) -> bool {
        self.flag_d = value;
        value
    }

    /// Sets the break flag and returns the stored value.
    pub fn set_flag_b(&mut self, value: bool) -> bool {
        self.flag_b = value;
        value
    }

    /// Sets the overflow flag and returns the stored value.
    pub fn set_flag_v(&mut self, value: bool) -> bool {
        self.flag_v = value;
        value
    }

    /// Sets the negative flag and returns the stored value.
    pub fn set_flag_n(&mut self, value: bool) -> bool {
        self.flag_n = value;
        value
    }

    /// Returns the status register as a packed byte.
    ///
    /// Bit layout (NV-BDIZC):
    /// - Bit 7: N (Negative)
    /// - Bit 6: V (Overflow)
    /// - Bit 5: (unused, always 1)
    /// - Bit 4: B (Break)
    /// - Bit 3: D (Decimal)
    /// - Bit 2: I (Interrupt Disable)
    /// - Bit 1: Z (Zero)
    /// - Bit 0: C (Carry)
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502_core::Registers;
    ///
    /// let regs = Registers::power_on();
    ///
    /// // I flag set (bit 2), bit 5 always 1
    /// assert_eq!(regs.status(), 0b00100100);
    /// ```
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b00100000; // Bit 5 always 1

        if self.flag_n {
            status |= 0b10000000;
        }
        if self.flag_v {
            status |= 0b01000000;
        }
        if self.flag_b {
            status |= 0b00010000;
        }
        if self.flag_d {
            status |= 0b00001000;
        }
        if self.flag_i {
            status |= 0b00000100;
        }
        if self.flag_z {
            status |= 0b00000010;
        }
        if self.flag_c {
            status |= 0b00000001;
        }

        status
    }

    /// Unpacks an NV-BDIZC byte into the individual flags. Bit 5 is ignored.
    pub fn set_status(&mut self, status: u8) {
        self.flag_n = status & 0b10000000 != 0;
        self.flag_v = status & 0b01000000 != 0;
        self.flag_b = status & 0b00010000 != 0;
        self.flag_d = status & 0b00001000 != 0;
        self.flag_i = status & 0b00000100 != 0;
        self.flag_z = status & 0b00000010 != 0;
        self.flag_c = status & 0b00000001 != 0;
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "A:{:02X} X:{:02X} Y:{:02X} P:{:02X} SP:{:02X} PC:{:04X}",
            self.a,
            self.x,
            self.y,
            self.status(),
            self.sp,
            self.pc
        )
    }
}
