//! Ray/primitive intersection and nearest-hit queries.

use ember_math::{build_orthonormal_basis, Interval, Ray, Vec3};
use ember_scene::{Plane, Scene, Sphere};

/// `|dot(d, n)|` at or below this counts as a ray parallel to a plane.
const PARALLEL_THRESHOLD: f32 = 1e-6;

/// Record of the nearest ray/scene intersection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Parameter t where the intersection occurs
    pub t: f32,
    /// Unit surface normal, always facing against the incoming ray
    pub normal: Vec3,
    /// Tangent and bitangent completing the shading frame around `normal`
    pub tangent: Vec3,
    pub bitangent: Vec3,
    /// Albedo of the surface that was hit
    pub color: f32,
    /// Radiance emitted by the surface (always 0 for planes)
    pub emission: f32,
    /// Specular branch marker; always false, every surface is diffuse
    pub reflect: bool,
}

impl Intersection {
    fn new(ray: &Ray, t: f32, outward_normal: Vec3, color: f32, emission: f32) -> Self {
        let normal = face_forward(outward_normal, ray.direction());
        let (tangent, bitangent) = build_orthonormal_basis(normal);
        Self {
            t,
            normal,
            tangent,
            bitangent,
            color,
            emission,
            reflect: false,
        }
    }
}

/// Flip `n` so it points against `direction`.
#[inline]
pub fn face_forward(n: Vec3, direction: Vec3) -> Vec3 {
    if n.dot(direction) > 0.0 {
        -n
    } else {
        n
    }
}

/// Nearest root of `|o + t d - center|^2 = r^2` strictly inside `ray_t`.
pub fn intersect_sphere(ray: &Ray, sphere: &Sphere, ray_t: Interval) -> Option<f32> {
    let oc = sphere.center - ray.origin();
    let a = ray.direction().length_squared();
    let h = ray.direction().dot(oc);
    let c = oc.length_squared() - sphere.radius * sphere.radius;

    let discriminant = h * h - a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();

    // Find the nearest root in the acceptable range
    let root = (h - sqrtd) / a;
    if ray_t.surrounds(root) {
        return Some(root);
    }
    let root = (h + sqrtd) / a;
    if ray_t.surrounds(root) {
        return Some(root);
    }
    None
}

/// Solve `dot(o + t d - point, n) = 0` for t, if it lies strictly inside `ray_t`.
pub fn intersect_plane(ray: &Ray, plane: &Plane, ray_t: Interval) -> Option<f32> {
    let denom = ray.direction().dot(plane.normal);
    if denom.abs() <= PARALLEL_THRESHOLD {
        return None;
    }

    let t = (plane.point - ray.origin()).dot(plane.normal) / denom;
    ray_t.surrounds(t).then_some(t)
}

enum Nearest<'a> {
    Sphere(&'a Sphere),
    Plane(&'a Plane),
}

/// Find the closest primitive hit with `t > epsilon`.
///
/// Every sphere and every plane is tested; the hit record is only built for
/// the winner.
pub fn intersect_scene(ray: &Ray, scene: &Scene, epsilon: f32) -> Option<Intersection> {
    let mut ray_t = Interval::beyond(epsilon);
    let mut nearest = None;

    for sphere in scene.spheres() {
        if let Some(t) = intersect_sphere(ray, sphere, ray_t) {
            ray_t = ray_t.with_max(t);
            nearest = Some(Nearest::Sphere(sphere));
        }
    }

    for plane in scene.planes() {
        if let Some(t) = intersect_plane(ray, plane, ray_t) {
            ray_t = ray_t.with_max(t);
            nearest = Some(Nearest::Plane(plane));
        }
    }

    let t = ray_t.max;
    nearest.map(|hit| match hit {
        Nearest::Sphere(sphere) => {
            let outward_normal = (ray.at(t) - sphere.center) / sphere.radius;
            Intersection::new(ray, t, outward_normal, sphere.color, sphere.emission)
        }
        Nearest::Plane(plane) => Intersection::new(ray, t, plane.normal, plane.color, 0.0),
    })
}
