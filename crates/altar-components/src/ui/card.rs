//! Card: a bordered surface with header, content and footer sections

container! {
	/// Card root
	Card: "div", slot = "card",
	class = "bg-card text-card-foreground flex flex-col gap-6 rounded-xl border py-6 shadow-sm",
}

container! {
	/// Card header; lays out a title, description and optional [`CardAction`]
	CardHeader: "div", slot = "card-header",
	class = "@container/card-header grid auto-rows-min grid-rows-[auto_auto] items-start gap-1.5 px-6 has-data-[slot=card-action]:grid-cols-[1fr_auto] [.border-b]:pb-6",
}

container! {
	CardTitle: "div", slot = "card-title",
	class = "leading-none font-semibold",
}

container! {
	CardDescription: "div", slot = "card-description",
	class = "text-muted-foreground text-sm",
}

container! {
	/// Action area placed in the top right corner of the header
	CardAction: "div", slot = "card-action",
	class = "col-start-2 row-span-2 row-start-1 self-start justify-self-end",
}

container! {
	CardContent: "div", slot = "card-content",
	class = "px-6",
}

container! {
	CardFooter: "div", slot = "card-footer",
	class = "flex items-center px-6 [.border-t]:pt-6",
}
