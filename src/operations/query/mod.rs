mod connected_pores;
mod interface_throats;
mod mode;
mod neighbor_pores;
mod neighbor_throats;
mod num_neighbors;

pub use connected_pores::{ConnectedPores, FindConnectedPores};
pub use interface_throats::FindInterfaceThroats;
pub use mode::Mode;
pub use neighbor_pores::{FindNeighborPores, Neighbors};
pub use neighbor_throats::FindNeighborThroats;
pub use num_neighbors::{NeighborCount, NumNeighbors};
