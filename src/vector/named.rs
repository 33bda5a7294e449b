//! Named element accessors, domain-specific aliases, and packed color conversions.

use super::Vector;

/// A 2D point.
pub type Point<T> = Vector<T, 2>;
/// A 2D point with [`f32`] coordinates.
pub type Pointf = Point<f32>;
/// A 2D point with [`i32`] coordinates.
pub type Pointi = Point<i32>;
/// A 2D point with [`u32`] coordinates.
pub type Pointu = Point<u32>;

/// A 2D extent (width and height).
pub type Size<T> = Vector<T, 2>;
/// A 2D extent with [`f32`] components.
pub type Sizef = Size<f32>;
/// A 2D extent with [`i32`] components.
pub type Sizei = Size<i32>;
/// A 2D extent with [`u32`] components.
pub type Sizeu = Size<u32>;

/// An RGB color.
pub type Rgb<T> = Vector<T, 3>;
/// An RGB color with [`f32`] channels in `[0, 1]`.
pub type Rgbf = Rgb<f32>;
/// An RGB color with 8-bit channels.
pub type Rgb8 = Rgb<u8>;

/// An RGBA color.
pub type Rgba<T> = Vector<T, 4>;
/// An RGBA color with [`f32`] channels in `[0, 1]`.
pub type Rgbaf = Rgba<f32>;
/// An RGBA color with 8-bit channels.
pub type Rgba8 = Rgba<u8>;

macro_rules! accessors {
    ($n:literal => $($get:ident, $set:ident = $index:literal;)+) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[doc = concat!("Returns the `", stringify!($get), "` component (element ", stringify!($index), ").")]
                #[inline]
                pub fn $get(&self) -> T {
                    self.0[$index]
                }

                #[doc = concat!("Sets the `", stringify!($get), "` component (element ", stringify!($index), ").")]
                #[inline]
                pub fn $set(&mut self, value: T) {
                    self.0[$index] = value;
                }
            )+
        }
    };
}

accessors!(1 =>
    x, set_x = 0;
);
accessors!(2 =>
    x, set_x = 0;
    y, set_y = 1;
    width, set_width = 0;
    height, set_height = 1;
);
accessors!(3 =>
    x, set_x = 0;
    y, set_y = 1;
    z, set_z = 2;
    r, set_r = 0;
    g, set_g = 1;
    b, set_b = 2;
);
accessors!(4 =>
    x, set_x = 0;
    y, set_y = 1;
    z, set_z = 2;
    w, set_w = 3;
    r, set_r = 0;
    g, set_g = 1;
    b, set_b = 2;
    a, set_a = 3;
);

/// Color channel types that can be packed into 8 bits.
///
/// Integer channels store the byte value directly, anything outside of `0..=255` is truncated to
/// its lowest 8 bits. Float channels are clamped to `[0, 1]` and scaled by 255.
pub trait Channel: Copy {
    /// Converts the channel value to a byte in the lowest 8 bits of the result.
    fn to_byte(self) -> u32;

    /// Converts a byte (`0..=255`) back to a channel value.
    fn from_byte(byte: u32) -> Self;
}

macro_rules! int_channel {
    ($($types:ty),+) => {
        $(
            impl Channel for $types {
                #[inline]
                fn to_byte(self) -> u32 {
                    (self as u32) & 0xff
                }

                #[inline]
                fn from_byte(byte: u32) -> Self {
                    byte as $types
                }
            }
        )+
    };
}
int_channel!(u8, u16, u32, i32);

macro_rules! float_channel {
    ($($types:ty),+) => {
        $(
            impl Channel for $types {
                #[inline]
                fn to_byte(self) -> u32 {
                    (self.clamp(0.0, 1.0) * 255.0) as u32
                }

                #[inline]
                fn from_byte(byte: u32) -> Self {
                    byte as $types / 255.0
                }
            }
        )+
    };
}
float_channel!(f32, f64);

/// Generates packing methods for one channel order.
///
/// The shifts give the bit position of the lowest bit of each channel.
macro_rules! packed {
    ($format:literal, $from:ident, $to:ident, r: $r:literal, g: $g:literal, b: $b:literal, a: $a:literal) => {
        impl<T: Channel> Rgba<T> {
            #[doc = concat!("Unpacks a color from a 32-bit `", $format, "` value.")]
            #[inline]
            pub fn $from(packed: u32) -> Self {
                Self([
                    T::from_byte((packed >> $r) & 0xff),
                    T::from_byte((packed >> $g) & 0xff),
                    T::from_byte((packed >> $b) & 0xff),
                    T::from_byte((packed >> $a) & 0xff),
                ])
            }

            #[doc = concat!("Packs this color into a 32-bit `", $format, "` value.")]
            #[inline]
            pub fn $to(&self) -> u32 {
                let [r, g, b, a] = self.0.map(T::to_byte);
                (r << $r) | (g << $g) | (b << $b) | (a << $a)
            }
        }

        impl<T: Channel> Rgb<T> {
            #[doc = concat!("Unpacks a color from a 32-bit `", $format, "` value, discarding alpha.")]
            #[inline]
            pub fn $from(packed: u32) -> Self {
                Self([
                    T::from_byte((packed >> $r) & 0xff),
                    T::from_byte((packed >> $g) & 0xff),
                    T::from_byte((packed >> $b) & 0xff),
                ])
            }

            #[doc = concat!("Packs this color into a 32-bit `", $format, "` value with an alpha of `0xff`.")]
            #[inline]
            pub fn $to(&self) -> u32 {
                let [r, g, b] = self.0.map(T::to_byte);
                (r << $r) | (g << $g) | (b << $b) | (0xff_u32 << $a)
            }
        }
    };
}

packed!("RGBA", from_rgba32, to_rgba32, r: 24, g: 16, b: 8, a: 0);
packed!("ARGB", from_argb32, to_argb32, r: 16, g: 8, b: 0, a: 24);
packed!("ABGR", from_abgr32, to_abgr32, r: 0, g: 8, b: 16, a: 24);
packed!("BGRA", from_bgra32, to_bgra32, r: 8, g: 16, b: 24, a: 0);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use crate::{vec2, vec3, vec4};

    use super::*;

    #[test]
    fn access() {
        assert_eq!(crate::Vec3f::X.x(), 1.0);
        assert_eq!(crate::Vec3f::Y.y(), 1.0);
        assert_eq!(crate::Vec4f::W.w(), 1.0);

        let mut v = vec2(0, 1);
        assert_eq!(v.width(), 0);
        assert_eq!(v.height(), 1);

        v.set_x(777);
        assert_eq!(v.width(), 777);
        assert_eq!(v[0], 777);
        v.set_height(9);
        assert_eq!(v.y(), 9);
        assert_eq!(v, [777, 9]);

        let mut c: Rgba8 = vec4(1, 2, 3, 4);
        assert_eq!((c.r(), c.g(), c.b(), c.a()), (1, 2, 3, 4));
        c.set_a(255);
        assert_eq!(c.w(), 255);
    }

    #[test]
    fn channel_orders() {
        let c: Rgba8 = vec4(0x11, 0x22, 0x33, 0x44);
        assert_eq!(c.to_rgba32(), 0x11223344);
        assert_eq!(c.to_argb32(), 0x44112233);
        assert_eq!(c.to_abgr32(), 0x44332211);
        assert_eq!(c.to_bgra32(), 0x33221144);

        let rgb: Rgb8 = vec3(0x11, 0x22, 0x33);
        assert_eq!(rgb.to_rgba32(), 0x112233ff);
        assert_eq!(rgb.to_argb32(), 0xff112233);
        assert_eq!(rgb.to_abgr32(), 0xff332211);
        assert_eq!(rgb.to_bgra32(), 0x332211ff);

        assert_eq!(Rgb8::from_argb32(0x80112233), rgb);
        assert_eq!(Rgba8::from_bgra32(0x33221144), c);
    }

    #[test]
    fn integer_channels_are_masked() {
        let c: Rgba<i32> = vec4(0x1ff, -1, 0, 256);
        assert_eq!(c.to_rgba32(), 0xffff0000);
    }

    #[test]
    fn byte_round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..1000 {
            let c: Rgba8 = Vector::from_fn(|_| rng.u8(..));
            assert_eq!(Rgba8::from_rgba32(c.to_rgba32()), c);
            assert_eq!(Rgba8::from_argb32(c.to_argb32()), c);
            assert_eq!(Rgba8::from_abgr32(c.to_abgr32()), c);
            assert_eq!(Rgba8::from_bgra32(c.to_bgra32()), c);

            let packed = rng.u32(..);
            assert_eq!(Rgba8::from_rgba32(packed).to_rgba32(), packed);
        }
    }

    #[test]
    fn float_round_trip() {
        let mut rng = fastrand::Rng::with_seed(0x3024b6663d843ca2);
        for _ in 0..1000 {
            let c: Rgbaf = Vector::from_fn(|_| rng.f32());
            let back = Rgbaf::from_abgr32(c.to_abgr32());
            assert_abs_diff_eq!(back, c, epsilon = 1.0 / 255.0);
        }

        let clamped: Rgbf = vec3(-1.0, 0.5, 2.0);
        assert_eq!(clamped.to_rgba32(), 0x007fffff);
        assert_eq!(Rgbf::from_rgba32(0xff00ffff), vec3(1.0, 0.0, 1.0));
    }
}
