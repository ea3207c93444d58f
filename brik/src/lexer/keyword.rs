// Copyright (C) 2023 - 2024 Tristan Gerritsen <tristan@thewoosh.org>
// All Rights Reserved.

use std::{borrow::Cow, fmt::{Display, Formatter}};

use super::Dialect;

/// Spellings that open a configuration file. Both are keywords in every dialect.
pub const ROOT_KEYWORDS: [&str; 2] = ["game", "juego"];

/// A reserved word of a [`Dialect`]. Keywords keep the spelling they were written with, but
/// their kind name is the upper-cased spelling, except for the root spellings which share
/// the kind `GAME`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Keyword {
    spelling: &'static str,
}

impl Keyword {
    #[must_use]
    pub fn parse(input: &str, dialect: &Dialect) -> Option<Self> {
        ROOT_KEYWORDS.iter()
            .chain(dialect.keywords())
            .find(|x| **x == input)
            .map(|spelling| Self { spelling: *spelling })
    }

    #[must_use]
    pub const fn spelling(&self) -> &'static str {
        self.spelling
    }

    #[must_use]
    pub fn is_game(&self) -> bool {
        ROOT_KEYWORDS.contains(&self.spelling)
    }

    #[must_use]
    pub fn name(&self) -> Cow<'static, str> {
        if self.is_game() {
            Cow::Borrowed("GAME")
        } else {
            Cow::Owned(self.spelling.to_uppercase())
        }
    }
}

impl AsRef<str> for Keyword {
    fn as_ref(&self) -> &str {
        self.spelling
    }
}

impl Display for Keyword {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spelling)
    }
}

pub(super) const TETRIS_KEYWORDS: &[&str] = &[
    "tablero", "piezas", "rotaciones", "perdiste", "eliminacion_filas", "puntos",
    "velocidad", "controles", "random",
];

pub(super) const SNAKE_KEYWORDS: &[&str] = &[
    // header
    "title", "author", "version",
    // sections
    "tablero", "serpiente", "comida", "paredes", "perdiste",
    "reglas", "puntos", "velocidad", "controles", "hud",
    "assets", "audio", "movimientos_permitidos", "niveles",
    // board
    "filas", "columnas", "fondo", "celda_px", "inicio_lleno", "bordes_solidos",
    // snake
    "velocidad_cps", "largo_inicial", "crecimiento_por_comida",
    "color", "posicion_inicial", "direccion_inicial", "x", "y",
    "colores_segmentos", "cola_elastica",
    // food
    "max_activa", "items", "tipo", "valor_puntos", "respawn_ms",
    "evitar_sobre_serpiente", "evitar_paredes",
    // walls
    "usar_paredes", "lista",
    // losing conditions and rules
    "colision_pared", "colision_cuerpo", "salir_tablero", "tiempo_agotado",
    "wrap_edges", "tick_ms", "pausa_permitida",
    // scoring
    "puntos_iniciales", "ganar_puntos", "perder_puntos",
    "bonus_longitud_activo", "bonus_longitud_cada_segmentos", "bonus_longitud_valor",
    "combo_tiempo_activo", "combo_tiempo_ventana_ms", "combo_tiempo_bonus",
    "multiplicadores", "racha_sin_choques_activo", "racha_umbral", "racha_factor",
    // speed and progression
    "velocidad_inicial_cps", "velocidad_progresiva",
    "aumentar_velocidad", "cada_puntos", "factor_aumento", "limite_cps",
    "control", "mantener_tick_constante", "input_buffer_ms",
    // levels
    "id", "objetivo_puntos", "cps_min", "cps_max", "paredes_extra",
    // controls
    "arriba", "abajo", "izquierda", "derecha", "pausar", "reiniciar",
    // HUD
    "mostrar_puntaje", "mostrar_velocidad", "mostrar_nivel", "posiciones",
    "puntaje_x", "puntaje_y", "velocidad_x", "velocidad_y", "nivel_x", "nivel_y",
    // assets and colours
    "charset", "simbolos", "cabeza", "pared", "paleta",
    "verde", "verde_oscuro", "rojo", "amarillo", "morado", "negro", "blanco",
    // audio
    "habilitado", "sonidos", "comer", "chocar", "subir_nivel", "volumen_global",
];

pub(super) const ARCADE_KEYWORDS: &[&str] = &[
    "tablero", "piezas", "puntos", "velocidad", "controles", "perdiste",
    "filas", "columnas", "fondo", "inicio_lleno", "color", "rotaciones", "random",
    "pieza_inicial", "pieza_siguiente", "ganar_puntos", "eliminar_fila",
    "velocidad_progresiva", "aumentar_velocidad", "cada_puntos", "cantidad_aumento",
    "izquierda", "derecha", "caida", "rotar", "pausar",
    "I", "O", "T", "L", "J", "S", "Z",
    "serpiente", "comida", "paredes", "reglas", "assets", "title", "author", "version",
    "velocidad_cps", "largo_inicial", "crecimiento_por_comida", "posicion_inicial",
    "direccion_inicial", "max_activa", "items", "tipo", "valor_puntos", "respawn_ms",
    "evitar_sobre_serpiente", "evitar_paredes", "usar_paredes", "lista",
    "colision_pared", "colision_cuerpo", "salir_tablero", "wrap_edges", "tick_ms",
    "bonus_longitud_activo", "bonus_longitud_cada_segmentos", "bonus_longitud_valor",
    "velocidad_inicial_cps", "factor_aumento", "limite_cps",
    "arriba", "abajo", "cabeza", "pared", "simbolos", "charset",
];
