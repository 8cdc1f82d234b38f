use crate::catalog::Node::{self, Namespace, Text};

pub(crate) static TREE: Node = Namespace(&[
    ("appTitle", Text("Ball Simulation")),
    (
        "controls",
        Namespace(&[
            // --- Physics parameters ---
            ("gravity", Text("Gravity (m/s²)")),
            ("density", Text("Ball Density (kg/m³)")),
            ("scaleHeight", Text("Scale Height (m)")),
            ("elasticity", Text("Elasticity")),
            ("material", Text("Material")),
            ("ballDiameter", Text("Ball Diameter (m)")),
            ("vacuum", Text("Vacuum Mode")),
            (
                "vacuumInfo",
                Text("In vacuum mode, air resistance is disabled and all balls fall at the same rate."),
            ),
            // --- Actions ---
            ("start", Text("Start Simulation")),
            ("reset", Text("Reset")),
            // --- Preferences ---
            ("language", Text("Language")),
            ("theme", Text("Theme")),
        ]),
    ),
    (
        "themes",
        Namespace(&[("light", Text("Light")), ("dark", Text("Dark"))]),
    ),
]);
