use crate::catalog::Node::{self, Namespace, Text};

pub(crate) static TREE: Node = Namespace(&[
    ("appTitle", Text("Симуляція м'ячика")),
    (
        "controls",
        Namespace(&[
            // --- Physics parameters ---
            ("gravity", Text("Прискорення (м/с²)")),
            ("density", Text("Густина м'ячика (кг/m³)")),
            ("scaleHeight", Text("Висота шкали (м)")),
            ("elasticity", Text("Пружність")),
            ("material", Text("Матеріал")),
            ("ballDiameter", Text("Діаметр м'ячика (м)")),
            ("vacuum", Text("Режим вакууму")),
            (
                "vacuumInfo",
                Text("У режимі вакууму опір повітря вимкнено, тому всі м'ячики падають однаково швидко."),
            ),
            // --- Actions ---
            ("start", Text("Почати симуляцію")),
            ("reset", Text("Скинути")),
            // --- Preferences ---
            ("language", Text("Мова")),
            ("theme", Text("Тема")),
        ]),
    ),
    (
        "themes",
        Namespace(&[("light", Text("Світла")), ("dark", Text("Темна"))]),
    ),
]);
