mod make_radial;

pub use make_radial::MakeRadialPolygon;
