use roomsim_engine::WorldError;
use roomsim_engine::sim::{Indicator, Item, Room, Switch, World};

/// The two-room world the binary runs.
pub fn sample_world() -> Result<World, WorldError> {
    World::new(vec![
        Room::new("Machine Room")
            .with(Item::new(1, "Generator"))
            .with(Item::new(2, "Turbine"))
            .with(Item::new(3, "Button"))
            .with(Switch::new(4, "Switch number one", true))
            .with(Indicator::new(5, "FIRST LED", false)),
        Room::new("Command Room")
            .with(Item::new(6, "Terminal"))
            .with(Switch::new(7, "Switch number TWO", true))
            .with(Indicator::new(8, "SECOND LED", false)),
    ])
}

#[cfg(test)]
mod tests {
    use roomsim_engine::sim::Id;

    use super::sample_world;

    #[test]
    fn sample_world_layout() {
        let world = sample_world().unwrap();

        assert_eq!(world.rooms().len(), 2);
        assert_eq!(world.rooms()[0].name(), "Machine Room");
        assert_eq!(world.rooms()[1].name(), "Command Room");
        assert_eq!(world.entity_count(), 8);
        assert_eq!(world.entity(Id::new(7)).unwrap().kind(), "Switch");
        assert_eq!(world.entity(Id::new(8)).unwrap().observe(), Some(false));
    }
}
