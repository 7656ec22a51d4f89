//! Host-side reference computation for the fixed matvec workload.

/// Output vector length; one work-item per element on the device side.
pub const DIM: usize = 4;

/// Matrix element count (DIM x DIM, row-major).
pub const MAT_LEN: usize = DIM * DIM;

/// Row-major 4x4 matrix with element at linear index i equal to i * 2.0.
pub fn generate_matrix() -> [f32; MAT_LEN] {
    let mut mat = [0.0f32; MAT_LEN];
    for (i, slot) in mat.iter_mut().enumerate() {
        *slot = i as f32 * 2.0;
    }
    mat
}

/// 4-element vector with element i equal to i * 3.0.
pub fn generate_vector() -> [f32; DIM] {
    let mut vec = [0.0f32; DIM];
    for (i, slot) in vec.iter_mut().enumerate() {
        *slot = i as f32 * 3.0;
    }
    vec
}

/// Matrix-vector product computed on the host.
///
/// Accumulates in plain ascending-column order with no fused
/// multiply-add, so the device kernel's result must match bit for bit.
pub fn reference_product(mat: &[f32; MAT_LEN], vec: &[f32; DIM]) -> [f32; DIM] {
    let mut out = [0.0f32; DIM];
    for (row, slot) in out.iter_mut().enumerate() {
        let mut acc = 0.0f32;
        for col in 0..DIM {
            acc += mat[row * DIM + col] * vec[col];
        }
        *slot = acc;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matrix_follows_generation_rule() {
        let mat = generate_matrix();
        assert_eq!(mat[0], 0.0);
        assert_eq!(mat[1], 2.0);
        assert_eq!(mat[15], 30.0);
    }

    #[test]
    fn vector_follows_generation_rule() {
        assert_eq!(generate_vector(), [0.0, 3.0, 6.0, 9.0]);
    }

    #[test]
    fn reference_matches_hand_computed_product() {
        let mat = generate_matrix();
        let vec = generate_vector();
        assert_eq!(reference_product(&mat, &vec), [84.0, 228.0, 372.0, 516.0]);
    }

    #[test]
    fn reference_is_deterministic() {
        let mat = generate_matrix();
        let vec = generate_vector();
        let a = reference_product(&mat, &vec);
        let b = reference_product(&mat, &vec);
        assert_eq!(a.map(f32::to_bits), b.map(f32::to_bits));
    }
}
