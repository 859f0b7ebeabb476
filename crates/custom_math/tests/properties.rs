use approx::{abs_diff_eq, assert_abs_diff_eq};
use custom_math::{Degrees, Matrix4x4, Quaternion, Vector3, Vector4};
use proptest::prelude::*;

prop_compose! {
    fn vector_strategy(max: f32)(
        x in -max..max,
        y in -max..max,
        z in -max..max,
    ) -> Vector3 {
        Vector3::new(x, y, z)
    }
}

prop_compose! {
    fn rotation_strategy()(
        axis in vector_strategy(1.0).prop_filter("axis must be nonzero", |v| v.magnitude() > 1e-2),
        angle in -360.0_f32..360.0,
    ) -> Quaternion {
        Quaternion::angle_axis(Degrees(angle), &axis)
    }
}

prop_compose! {
    fn nonzero_quaternion_strategy()(
        x in -10.0_f32..10.0,
        y in -10.0_f32..10.0,
        z in -10.0_f32..10.0,
        w in -10.0_f32..10.0,
    ) -> Quaternion {
        Quaternion::new(x, y, z, w)
    }
}

prop_compose! {
    fn scaled_direction_strategy()(
        direction in vector_strategy(1.0)
            .prop_filter("direction must be nonzero", |v| v.magnitude() > 1e-2),
        log_magnitude in -4.0_f32..4.0,
    ) -> Vector3 {
        direction.normalized() * 10.0_f32.powf(log_magnitude)
    }
}

#[test]
fn scaling_matrix_scales_homogeneous_point() {
    let scaled = Matrix4x4::scale(&Vector3::new(2.0, 3.0, 4.0)) * Vector4::new(1.0, 1.0, 1.0, 1.0);
    assert_eq!(scaled, Vector4::new(2.0, 3.0, 4.0, 1.0));
}

#[test]
fn quarter_turn_about_up_rotates_forward_to_right() {
    let rotation = Quaternion::angle_axis(Degrees(90.0), &Vector3::UP);
    assert_abs_diff_eq!(rotation * Vector3::FORWARD, Vector3::RIGHT, epsilon = 1e-6);
    assert_abs_diff_eq!(
        Matrix4x4::rotate(&rotation) * Vector4::from_direction(&Vector3::FORWARD),
        Vector4::from_direction(&Vector3::RIGHT),
        epsilon = 1e-6
    );
}

#[test]
fn angle_axis_uses_every_axis_component() {
    let rotation = Quaternion::angle_axis(Degrees(90.0), &Vector3::FORWARD);
    assert_abs_diff_eq!(rotation.z, 0.5_f32.sqrt(), epsilon = 1e-6);
    assert_eq!(rotation.y, 0.0);
}

#[test]
fn lerp_between_identities_gives_identity() {
    let lerped = Quaternion::IDENTITY.lerp(&Quaternion::new(0.0, 0.0, 0.0, 1.0), 0.5);
    assert_eq!(lerped, Quaternion::IDENTITY);
}

#[test]
fn identity_products_are_identity() {
    assert_eq!(
        Quaternion::IDENTITY * Quaternion::IDENTITY,
        Quaternion::IDENTITY
    );
    assert_eq!(Quaternion::euler(0.0, 0.0, 0.0), Quaternion::IDENTITY);
}

proptest! {
    #[test]
    fn rotation_matrix_and_its_inverse_cancel(
        rotation in rotation_strategy(),
        v in vector_strategy(100.0),
    ) {
        let product = Matrix4x4::rotate(&rotation) * Matrix4x4::rotate(&rotation.inverse());
        let v = Vector4::from_point(&v);
        prop_assert!(abs_diff_eq!(product * v, v, epsilon = 1e-3));
    }

    #[test]
    fn transposing_twice_gives_original(elements in prop::array::uniform16(-1e3_f32..1e3)) {
        let matrix: Matrix4x4 = bytemuck::cast(elements);
        prop_assert_eq!(matrix.transposed().transposed(), matrix);

        let mut in_place = matrix;
        in_place.transpose();
        prop_assert_eq!(in_place, matrix.transposed());
    }

    #[test]
    fn identity_matrix_leaves_vectors_unchanged(v in vector_strategy(1e3), w in -1e3_f32..1e3) {
        let v = Vector4::new(v.x, v.y, v.z, w);
        prop_assert_eq!(Matrix4x4::IDENTITY * v, v);
    }

    #[test]
    fn normalized_quaternion_has_unit_norm(
        q in nonzero_quaternion_strategy().prop_filter("must be nonzero", |q| q.norm() > 1e-3),
    ) {
        let normalized = q.normalized();
        prop_assert!(abs_diff_eq!(normalized.norm(), 1.0, epsilon = 1e-5));
        prop_assert!(abs_diff_eq!(normalized.dot(&normalized), 1.0, epsilon = 1e-5));
    }

    #[test]
    fn slerp_hits_endpoints(a in rotation_strategy(), b in rotation_strategy()) {
        let start = a.slerp(&b, 0.0);
        let end = a.slerp(&b, 1.0);
        // Slerp may return either of the two quaternions representing a rotation.
        prop_assert!(
            abs_diff_eq!(start, a, epsilon = 1e-4) || abs_diff_eq!(start, -a, epsilon = 1e-4)
        );
        prop_assert!(
            abs_diff_eq!(end, b, epsilon = 1e-4) || abs_diff_eq!(end, -b, epsilon = 1e-4)
        );
    }

    #[test]
    fn quaternion_and_matrix_rotate_vectors_alike(
        rotation in rotation_strategy(),
        v in vector_strategy(10.0),
    ) {
        let by_matrix = Matrix4x4::rotate(&rotation).transform_vector(&v);
        prop_assert!(abs_diff_eq!(rotation * v, by_matrix, epsilon = 1e-4));
    }

    #[test]
    fn from_to_rotation_depends_only_on_directions(
        from in scaled_direction_strategy(),
        to in scaled_direction_strategy(),
    ) {
        let rotation = Quaternion::from_to_rotation(&from, &to);
        prop_assert!(abs_diff_eq!(rotation.norm(), 1.0, epsilon = 1e-5));
        prop_assert!(abs_diff_eq!(rotation * from.normalized(), to.normalized(), epsilon = 2e-3));

        let look = Quaternion::look_rotation(&to);
        prop_assert!(abs_diff_eq!(look * Vector3::FORWARD, to.normalized(), epsilon = 2e-3));
    }

    #[test]
    fn trs_applies_scale_then_rotation_then_translation(
        position in vector_strategy(10.0),
        rotation in rotation_strategy(),
        scaling in vector_strategy(5.0),
        point in vector_strategy(10.0),
    ) {
        let trs = Matrix4x4::trs(&position, &rotation, &scaling);
        let scaled = Vector3::new(point.x * scaling.x, point.y * scaling.y, point.z * scaling.z);
        let expected = rotation * scaled + position;
        prop_assert!(abs_diff_eq!(trs.transform_point(&point), expected, epsilon = 1e-3));
    }
}
