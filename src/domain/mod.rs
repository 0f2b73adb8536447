// Domain layer: the dish record and the ports the export layer is generic over.

pub mod model;
pub mod ports;
