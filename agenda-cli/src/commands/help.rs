use owo_colors::OwoColorize;

const SECTIONS: [(&str, &str); 5] = [
    (
        "1. Crear (Create)",
        "Crea nous esdeveniments amb el títol, les dates, les hores,\n  la ubicació i una descripció.",
    ),
    (
        "2. Llegir (Read)",
        "Mostra tots els esdeveniments que has creat, amb la seva durada.",
    ),
    (
        "3. Actualitzar (Update)",
        "Modifica qualsevol camp d'un esdeveniment. Prem ENTER per deixar\n  el valor anterior; la durada es torna a calcular.",
    ),
    (
        "4. Esborrar (Delete)",
        "Elimina un esdeveniment que ja no necessites.",
    ),
    (
        "5. Calendari",
        "Mostra el mes actual amb el dia d'avui destacat.",
    ),
];

pub fn run() {
    println!();
    println!(
        "{}",
        "  L'agenda et permet gestionar els teus esdeveniments d'una manera senzilla.  "
            .on_magenta()
    );
    for (title, body) in SECTIONS {
        println!();
        println!("{}", format!("  {:<60}", title).on_blue());
        println!();
        println!("  {}", body);
    }
    println!();
    println!(
        "  {}",
        "Les dates s'escriuen com DD/MM/AAAA i les hores com HH:MM.".dimmed()
    );
}
