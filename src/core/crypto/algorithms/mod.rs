/*!
Algorithm backends of the native provider.

Each parameter set is compiled in only when its Cargo feature is on; the
constructor for a disabled set returns `None`, which is how the registry
tells "supported" from "enabled".
*/

pub mod kem;
pub mod native;
pub mod signatures;

pub use native::NativeProvider;

/// Copy `src` into `dst`, failing unless the lengths match exactly.
#[allow(dead_code)]
pub(crate) fn copy_exact(dst: &mut [u8], src: &[u8]) -> bool {
    if dst.len() != src.len() {
        return false;
    }
    dst.copy_from_slice(src);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_exact() {
        let mut dst = [0u8; 4];
        assert!(copy_exact(&mut dst, &[1, 2, 3, 4]));
        assert_eq!(dst, [1, 2, 3, 4]);

        assert!(!copy_exact(&mut dst, &[9, 9]));
        assert_eq!(dst, [1, 2, 3, 4]);
    }
}
