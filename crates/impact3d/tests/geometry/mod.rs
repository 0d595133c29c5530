mod cuboid_cuboid_sat;
mod gjk_epa;
mod manifold_size;
mod sort_and_sweep;
